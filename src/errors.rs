use thiserror::Error;

/// Errors that can occur while decoding a capture stream.
#[derive(Debug, Error)]
pub enum PcapError {
    /// The buffer is too small to decode the expected data.
    /// # Fields
    /// - 0: number of additional bytes needed
    #[error("Need at least {0} more bytes")]
    IncompleteBuffer(usize),
    /// The file does not start with a known pcap magic number.
    #[error("Invalid magic number: {0:#010X}")]
    InvalidMagicNumber(u32),
    /// A captured frame is shorter than its fixed leading fields.
    /// # Fields
    /// - 0: captured length of the frame
    #[error("Captured frame too short to decode: {0}B")]
    FrameTruncated(usize),
    /// An I/O error occurred while reading from the byte-stream source.
    #[error("I/O error while reading the stream")]
    IoError(#[from] std::io::Error),
}
