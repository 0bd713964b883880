//! Merging of independent result streams

use super::result::ScanResult;
use tokio::sync::mpsc;

/// Merge multiple result streams into one
///
/// Each source keeps its internal order; across sources results interleave
/// in whatever order the producers race. The merged stream closes once
/// every source has closed.
pub fn merge(sources: Vec<mpsc::Receiver<ScanResult>>) -> mpsc::Receiver<ScanResult> {
    let capacity = (sources.len() * 2).max(2);
    let (tx, rx) = mpsc::channel(capacity);

    for mut source in sources {
        let tx = tx.clone();
        tokio::spawn(async move {
            while let Some(result) = source.recv().await {
                if tx.send(result).await.is_err() {
                    // Consumer hung up; stop forwarding
                    break;
                }
            }
        });
    }

    rx
}
