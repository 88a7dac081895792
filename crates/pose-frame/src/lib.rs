//! Pose landmark input types
//!
//! The pose estimator is an external collaborator. This crate defines the
//! shape of what it hands us: a fixed landmark enumeration and one possibly
//! partial snapshot of joint positions per video frame.

pub mod frame;
pub mod joint;

pub use frame::{JointFrame, Point2};
pub use joint::Joint;
