pub mod output_render;
