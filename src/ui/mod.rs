pub mod article_view;
pub mod outside_click;
pub mod params_panel;
