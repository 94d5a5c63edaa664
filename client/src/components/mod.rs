pub mod about;
pub mod contact_form;
pub mod contact_section;
pub mod experience_timeline;
pub mod hero;
pub mod loading_screen;
pub mod map_section;
pub mod projects;
pub mod reveal;
pub mod scroll_to_top;
pub mod site_footer;
pub mod site_header;
pub mod skills_section;
