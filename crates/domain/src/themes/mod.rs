//! Themed component factories.
//!
//! Each factory produces a matched bundle of abilities, loot, and default
//! AI behavior for one theme. Within one factory every output belongs to
//! the same theme; there is no cross-theme leakage.
//!
//! # Built-in themes
//!
//! - Fire (`fire`) - heavy breath damage, aggressive behavior
//! - Ice (`ice`) - slows and shielding, defensive behavior
//! - Shadow (`shadow`) - burst damage and stealth, tactical behavior

mod fire;
mod ice;
mod shadow;
mod traits;

pub use fire::FireComponentFactory;
pub use ice::IceComponentFactory;
pub use shadow::ShadowComponentFactory;
pub use traits::ComponentFactory;
