pub mod artworks;
