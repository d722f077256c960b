use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("byte buffer length {len} is not a multiple of the {stride}-byte pixel stride")]
    RaggedBuffer { len: usize, stride: usize },

    #[error("pixel buffer length {len} does not match dimensions {width}x{height}")]
    DimensionMismatch {
        len: usize,
        width: usize,
        height: usize,
    },
}
