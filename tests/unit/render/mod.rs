mod paint;
mod scene;
mod theme;
