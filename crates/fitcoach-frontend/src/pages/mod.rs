//! Page components for different routes in the application.

pub mod classes;
pub mod home;
pub mod login;
pub mod register;

pub use classes::*;
pub use home::*;
pub use login::*;
pub use register::*;
