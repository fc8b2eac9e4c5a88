// linkshort terminal presentation layer.

pub mod renderer;
