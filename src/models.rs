pub mod item;
pub mod types;

pub use item::{Anim, Button, ClientData, Disable, ItemRecord, ItemType, Prop, PropPlacement, ServerData, Status};
pub use types::{Axis, Target, Vec3};
