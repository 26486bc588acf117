//! Picture sources: anything the form can read a picture from.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use employee_profile_shared::{picture_mime, PictureError, PicturePart};

/// A picked file whose contents are read lazily.
#[async_trait(?Send)]
pub trait PictureSource {
    fn name(&self) -> String;
    fn content_type(&self) -> Option<String>;
    fn size(&self) -> u64;
    async fn read_bytes(&self) -> Result<Vec<u8>, PictureError>;
}

/// Picture already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemoryPicture {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl InMemoryPicture {
    pub fn new(name: impl Into<String>, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.map(str::to_string),
            bytes,
        }
    }
}

#[async_trait(?Send)]
impl PictureSource for InMemoryPicture {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn content_type(&self) -> Option<String> {
        self.content_type.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, PictureError> {
        Ok(self.bytes.clone())
    }
}

/// Files picked through the `input type="file"` element.
#[async_trait(?Send)]
impl PictureSource for dioxus::html::FileData {
    fn name(&self) -> String {
        dioxus::html::FileData::name(self)
    }

    fn content_type(&self) -> Option<String> {
        dioxus::html::FileData::content_type(self)
    }

    fn size(&self) -> u64 {
        dioxus::html::FileData::size(self)
    }

    async fn read_bytes(&self) -> Result<Vec<u8>, PictureError> {
        dioxus::html::FileData::read_bytes(self)
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|e| PictureError::Read(e.to_string()))
    }
}

/// The picture currently chosen in the form. Metadata is captured when the
/// file is picked; the bytes stay with the source until needed.
#[derive(Clone)]
pub struct SelectedPicture {
    name: String,
    mime: String,
    size: u64,
    source: Rc<dyn PictureSource>,
}

impl SelectedPicture {
    pub fn new(source: Rc<dyn PictureSource>) -> Self {
        let name = source.name();
        let mime = picture_mime(source.content_type().as_deref(), &name);
        Self {
            name,
            mime,
            size: source.size(),
            source,
        }
    }

    pub fn from_source(source: impl PictureSource + 'static) -> Self {
        Self::new(Rc::new(source))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>, PictureError> {
        self.source.read_bytes().await
    }

    /// Read the whole file into a payload part named after the original file.
    pub async fn to_part(&self) -> Result<PicturePart, PictureError> {
        Ok(PicturePart {
            filename: self.name.clone(),
            content_type: self.mime.clone(),
            bytes: self.read_bytes().await?,
        })
    }
}

impl fmt::Debug for SelectedPicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedPicture")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl PartialEq for SelectedPicture {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn selected_picture_reads_into_named_part() {
        let picture = SelectedPicture::from_source(InMemoryPicture::new(
            "portrait.jpeg",
            None,
            vec![0xff, 0xd8, 0xff],
        ));

        assert_eq!(picture.mime(), "image/jpeg");
        assert_eq!(picture.size(), 3);

        let part = picture.to_part().await.unwrap();
        assert_eq!(part.filename, "portrait.jpeg");
        assert_eq!(part.content_type, "image/jpeg");
        assert_eq!(part.bytes, vec![0xff, 0xd8, 0xff]);
    }

    #[test]
    fn clones_compare_equal_but_distinct_picks_do_not() {
        let a = SelectedPicture::from_source(InMemoryPicture::new("a.png", None, vec![1]));
        let b = SelectedPicture::from_source(InMemoryPicture::new("a.png", None, vec![1]));
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}
