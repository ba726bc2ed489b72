mod comic;
mod layer;
