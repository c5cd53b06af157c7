// src/gui/components/mod.rs
pub mod data_table;
pub mod metrics;
pub mod sidebar;
pub mod tabs;
