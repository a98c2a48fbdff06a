pub mod strains_vec;
