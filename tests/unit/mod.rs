mod generator;
mod render;
