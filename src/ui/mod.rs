//! UI layer: App orchestrator, AppWindow trait, gradient meshes, and windows.

pub mod app;
pub mod gradient;
pub mod window;
pub mod windows;
