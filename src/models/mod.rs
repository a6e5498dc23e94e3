pub use breadcrumb::*;
pub use case_study::*;
pub use image::*;
pub use media::*;
pub use news::*;
pub use record::*;
pub use seo::*;
pub use service::*;
pub use status::*;
pub use user::*;

mod breadcrumb;
mod case_study;
mod image;
mod media;
mod news;
mod record;
mod seo;
mod service;
mod status;
mod user;
