pub mod features;
pub mod film_strip;
pub mod footer;
pub mod hero;
pub mod notification;
pub mod showcase;
