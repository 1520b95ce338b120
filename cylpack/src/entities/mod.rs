mod container;
mod cylinder;
mod instance;
mod layout;

pub use container::Container;
pub use cylinder::Cylinder;
pub use instance::Instance;
pub use layout::Layout;
pub use layout::PlacedCylinder;
