pub mod buttons_render;
