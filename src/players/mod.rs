pub mod maniac;
pub use maniac::*;

pub mod nit;
pub use nit::*;

pub mod station;
pub use station::*;
