//! IBC transfer timeout height

use crate::errors::SwapError;
use crate::lcd::BlockSource;

/// Blocks past the current height before an IBC transfer times out.
pub const TIMEOUT_HEIGHT_OFFSET: u64 = 100;

/// Derive the timeout height for an IBC transfer from the chain's latest
/// block height.
pub async fn timeout_height<S: BlockSource>(source: &S) -> Result<u64, SwapError> {
    let height = source.latest_block_height().await?;
    Ok(height + TIMEOUT_HEIGHT_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedHeight(u64);

    #[async_trait]
    impl BlockSource for FixedHeight {
        async fn latest_block_height(&self) -> Result<u64, SwapError> {
            Ok(self.0)
        }
    }

    struct FailingHeight;

    #[async_trait]
    impl BlockSource for FailingHeight {
        async fn latest_block_height(&self) -> Result<u64, SwapError> {
            Err(SwapError::Response("lcd unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn adds_offset_to_latest_height() {
        assert_eq!(timeout_height(&FixedHeight(4_837_261)).await.unwrap(), 4_837_361);
    }

    #[tokio::test]
    async fn fetch_failure_propagates() {
        let err = timeout_height(&FailingHeight).await.unwrap_err();
        assert!(matches!(err, SwapError::Response(_)));
    }
}
