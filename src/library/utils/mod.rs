pub mod phash_ops;
