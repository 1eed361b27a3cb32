/// Column name given to the designated input library in the matrix.
pub const INPUT_COLUMN: &str = "reads";

/// Maximum read count permitted in any single sample at one site.
pub const DEFAULT_PER_SAMPLE_THRESHOLD: u32 = 5;

/// Maximum summed read count across all samples at one site.
pub const DEFAULT_CROSS_SAMPLE_THRESHOLD: u64 = 55;

pub const DEFAULT_OUT: &str = "zero_genes.txt";
