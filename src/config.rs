pub mod genomic;
