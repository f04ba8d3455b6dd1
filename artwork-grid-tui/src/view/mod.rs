//! View 层：UI 渲染（只读 Model）

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
