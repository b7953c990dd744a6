//! Home page section content.

/// Semantic icon name. The front end maps each glyph to its icon theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    Building,
    Scale,
    Search,
    Compass,
    Shield,
    Award,
    Users,
    Message,
    Calendar,
    FileCheck,
}

pub struct Service {
    /// Two-digit ordinal shown on the card.
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
    pub tags: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        number: "01",
        title: "Building Surveys (Level 3)",
        description: "Comprehensive structural assessments for older or complex properties. Our 85+ page reports include detailed photos and technical explanations.",
        glyph: Glyph::Building,
        tags: &["Structural", "Level 3", "Detailed"],
    },
    Service {
        number: "02",
        title: "HomeBuyer Reports (Level 2)",
        description: "The standard choice for modern properties in reasonable condition. Clear, independent advice on building defects and maintenance.",
        glyph: Glyph::Scale,
        tags: &["Level 2", "Pre-Purchase", "Standard"],
    },
    Service {
        number: "03",
        title: "Damp & Timber Investigations",
        description: "Specialist pre-purchase damp and timber surveys. We identify the root cause of issues and provide independent remedial advice.",
        glyph: Glyph::Search,
        tags: &["Damp", "Timber", "Specialist"],
    },
    Service {
        number: "04",
        title: "Listed Building Surveys",
        description: "Expert investigations for historic and timber-framed buildings. We understand the unique requirements of heritage property maintenance.",
        glyph: Glyph::Compass,
        tags: &["Historic", "Listed", "Heritage"],
    },
];

pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        label: "Surveys Completed",
        value: "12,000+",
        description: "Trusted, expert reports delivered across the UK.",
    },
    Stat {
        label: "Accuracy Rating",
        value: "99.8%",
        description: "Precise technical data you can rely on for your investment.",
    },
    Stat {
        label: "Project Value",
        value: "£3.5B+",
        description: "Total value of properties surveyed to date by our team.",
    },
];

pub struct ProcessStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

pub const PROCESS: &[ProcessStep] = &[
    ProcessStep {
        number: "01",
        title: "Get in Touch",
        description: "Contact us for a free consultation. We'll discuss your property needs and recommend the right service.",
        glyph: Glyph::Message,
    },
    ProcessStep {
        number: "02",
        title: "Book Your Survey",
        description: "We'll schedule a convenient time, confirm costs upfront, and assign your dedicated surveyor.",
        glyph: Glyph::Calendar,
    },
    ProcessStep {
        number: "03",
        title: "Thorough Inspection",
        description: "Our RICS surveyor conducts a comprehensive on-site inspection using the latest techniques.",
        glyph: Glyph::Search,
    },
    ProcessStep {
        number: "04",
        title: "Receive Your Report",
        description: "Get a clear, detailed report with findings and recommendations, typically within 5 working days.",
        glyph: Glyph::FileCheck,
    },
];

pub struct Project {
    pub title: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PORTFOLIO: &[Project] = &[
    Project {
        title: "Timber-Framed Cottage",
        location: "Surrey",
        description: "Specialist Level 3 survey for a 400-year-old Grade II listed cottage.",
        image: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?q=80&w=2070&auto=format&fit=crop",
    },
    Project {
        title: "Modern Townhouse",
        location: "London",
        description: "HomeBuyer Level 2 report with detailed drone photography of the roof.",
        image: "https://images.unsplash.com/photo-1583608205776-bfd35f0d9f83?q=80&w=2070&auto=format&fit=crop",
    },
    Project {
        title: "Edwardian Residence",
        location: "Brighton",
        description: "Comprehensive damp and timber investigation for a period property.",
        image: "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?q=80&w=1935&auto=format&fit=crop",
    },
];

pub struct ExpertisePillar {
    pub title: &'static str,
    pub description: &'static str,
    pub glyph: Glyph,
}

pub const EXPERTISE: &[ExpertisePillar] = &[
    ExpertisePillar {
        title: "100% Independent",
        description: "We offer completely impartial property advice and guidance, with no ties to estate agents or lenders.",
        glyph: Glyph::Shield,
    },
    ExpertisePillar {
        title: "Qualified Experts",
        description: "Our team consists of fully qualified Chartered Building Engineers and Surveyors with deep technical knowledge.",
        glyph: Glyph::Award,
    },
    ExpertisePillar {
        title: "Approachable Team",
        description: "Our friendly team are always on hand to guide and advise you, ensuring you understand every aspect of your report.",
        glyph: Glyph::Users,
    },
];

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sue W",
        role: "Home Owner",
        text: "We highly recommend Weldon Young. After a site visit, they quickly provided an excellent, very detailed report which clearly identified the damp issues we were experiencing and offered advice on resolving them.",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?q=80&w=1974&auto=format&fit=crop",
    },
    Testimonial {
        name: "Yvonne Lord",
        role: "Home Buyer",
        text: "I had a level 3 home buyers report. The office was friendly and professional. The surveyor did an excellent detailed survey with very clear drone photography of the roof. Highly recommend.",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?q=80&w=2070&auto=format&fit=crop",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_sizes() {
        assert_eq!(SERVICES.len(), 4);
        assert_eq!(STATS.len(), 3);
        assert_eq!(PROCESS.len(), 4);
        assert_eq!(PORTFOLIO.len(), 3);
        assert_eq!(EXPERTISE.len(), 3);
        assert_eq!(TESTIMONIALS.len(), 2);
    }

    #[test]
    fn test_ordinals_are_sequential() {
        for (i, service) in SERVICES.iter().enumerate() {
            assert_eq!(service.number, format!("{:02}", i + 1));
        }
        for (i, step) in PROCESS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }
}
