//! Input-to-orientation control core for a 360° panorama viewer.
//!
//! Pointer drags, touch swipes and device-orientation readings are turned
//! into one camera orientation, updated once per frame. Projection modes
//! (fisheye, tiny planet, equirectangular) reshape the camera through
//! single-shot animations run by a per-frame [`Scheduler`].
//!
//! The host owns the event loop: it feeds [`InputEvent`]s to [`Controls`],
//! then each frame calls [`Controls::tick`] and [`Scheduler::tick`].

pub mod config;
pub mod controls;
pub mod error;
pub mod input;
pub mod projection;
pub mod scene;
pub mod scheduler;
pub mod timer;

pub use config::ControlConfig;
pub use controls::{ControlContext, Controller, ControllerState, Controls, RotationDelta};
pub use error::{ControlError, Result};
pub use input::{DeviceOrientationEvent, EventKind, InputEvent};
pub use projection::{ProjectionMode, Projections};
pub use scene::{Camera, Geometry, Orientation, ProjectionConstraints, Scene};
pub use scheduler::{Animation, AnimationHandle, Scheduler};
pub use timer::{Clock, ManualClock, SystemClock};
