//! Content sections, in page order after the hero.

mod about;
mod contact;
mod education;
mod experience;
mod projects;
mod skills;
mod testimonials;

pub use about::About;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use projects::Projects;
pub use skills::Skills;
pub use testimonials::Testimonials;
