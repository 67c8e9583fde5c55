//! Paint a wall in a photo
//!
//! Click a point on a wall, detect the surrounding region of similar color,
//! pick a paint color, and repaint the region with one of its Lab-interpolated
//! shades.
//!
//! ```no_run
//! use wall_tint::{io, Color, Session};
//!
//! # fn main() -> wall_tint::Result<()> {
//! let photo = io::load_image(std::path::Path::new("room.jpg"))?;
//! let mut session = Session::with_defaults(photo);
//! session.select_wall(320, 180)?;
//! session.choose_base_color(Color::from_hex("#2196F3")?)?;
//! session.apply_shade(4)?;
//! io::save_image(session.buffer(), std::path::Path::new("room-blue.png"))?;
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod color;
pub mod config;
pub mod error;
pub mod highlight;
pub mod io;
pub mod paints;
pub mod recolor;
pub mod region;
pub mod session;
pub mod shades;

pub use buffer::PixelBuffer;
pub use color::{Color, LabColor};
pub use config::WallTintConfig;
pub use error::{Result, WallTintError};
pub use paints::{PaintColor, PaintPalette};
pub use region::{Region, DEFAULT_THRESHOLD};
pub use session::Session;
pub use shades::{ShadeSequence, DEFAULT_SHADE_STEPS};
