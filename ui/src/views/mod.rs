mod home;
pub use home::Home;

mod hero;
pub use hero::HeroSection;

mod about;
pub use about::AboutSection;

mod gallery;
pub use gallery::GallerySection;

mod contact;
pub use contact::ContactSection;
