//! Cover and image resolution.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{AssetRef, Document};

/// An image declared by the document, under its name inside the container.
pub(crate) struct DeclaredImage<'a> {
    pub asset: &'a AssetRef,
    pub name: String,
}

/// The cover followed by the extra images, deduplicated by file name.
///
/// The first occurrence of a name wins, so an extra image sharing the
/// cover's name is dropped. Images without a file name are skipped.
pub(crate) fn declared_images(doc: &Document) -> Vec<DeclaredImage<'_>> {
    let mut images: Vec<DeclaredImage<'_>> = Vec::new();
    let declared = std::iter::once(doc.cover()).chain(doc.metadata().images.iter());

    for asset in declared {
        let name = asset.file_name();
        if name.is_empty() {
            warn!(asset = %asset.declared(), "image has no file name, skipping");
            continue;
        }
        if images.iter().any(|i| i.name == name) {
            debug!(%name, "skipping duplicate image");
            continue;
        }
        images.push(DeclaredImage { asset, name });
    }
    images
}

/// Read an asset's bytes.
pub(crate) async fn load(asset: &AssetRef) -> Result<Vec<u8>> {
    match asset {
        AssetRef::Path(path) => {
            let data = tokio::fs::read(path).await.map_err(|source| Error::AssetLoad {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = data.len(), "loaded asset");
            Ok(data)
        }
        AssetRef::Loaded { data, .. } => Ok(data.clone()),
    }
}
