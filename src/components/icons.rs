//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use weldon_core::content::Glyph;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as ArrowLeft, LuArrowRight as ArrowRight, LuAward as Award,
        LuBuilding2 as Building, LuCalendar as Calendar, LuCompass as Compass,
        LuFileCheck as FileCheck, LuMail as Mail, LuMenu as Menu, LuMessageSquare as Message,
        LuPhone as Phone, LuScale as Scale, LuSearch as Search, LuShield as Shield,
        LuStar as Star, LuUsers as Users, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowLeft as ArrowLeft, BsArrowRight as ArrowRight, BsAward as Award,
        BsBuilding as Building, BsCalendar as Calendar, BsChatSquareText as Message,
        BsClipboardCheck as Scale, BsCompass as Compass, BsEnvelope as Mail,
        BsFileEarmarkCheck as FileCheck, BsList as Menu, BsPeople as Users, BsSearch as Search,
        BsShieldCheck as Shield, BsStarFill as Star, BsTelephone as Phone, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_LEFT, ArrowLeft);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(AWARD, Award);
themed_icon!(BUILDING, Building);
themed_icon!(CALENDAR, Calendar);
themed_icon!(CLOSE, Close);
themed_icon!(COMPASS, Compass);
themed_icon!(FILE_CHECK, FileCheck);
themed_icon!(MAIL, Mail);
themed_icon!(MENU, Menu);
themed_icon!(MESSAGE, Message);
themed_icon!(PHONE, Phone);
themed_icon!(SCALE, Scale);
themed_icon!(SEARCH, Search);
themed_icon!(SHIELD, Shield);
themed_icon!(STAR, Star);
themed_icon!(USERS, Users);

/// Icon for a content glyph.
pub fn glyph(glyph: Glyph) -> Icon {
    match glyph {
        Glyph::Building => BUILDING,
        Glyph::Scale => SCALE,
        Glyph::Search => SEARCH,
        Glyph::Compass => COMPASS,
        Glyph::Shield => SHIELD,
        Glyph::Award => AWARD,
        Glyph::Users => USERS,
        Glyph::Message => MESSAGE,
        Glyph::Calendar => CALENDAR,
        Glyph::FileCheck => FILE_CHECK,
    }
}
