//! Decorative 3-D background: a drifting particle cloud and three wireframe
//! solids, advanced once per frame.

pub mod animator;
pub mod scene;
