pub mod media_tree;
