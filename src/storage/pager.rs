use std::{
    collections::HashMap,
    fs::{File, OpenOptions},
    io::{Read, Seek, SeekFrom, Write},
    path::Path,
};

use crate::types::{
    PAGE_SIZE, PageId, TABLE_MAX_PAGES,
    error::DatabaseError,
    page::Page,
};

/// Owns the backing file and the page cache. Pages are loaded lazily on
/// first touch and kept until close; the pager is the sole writer of the
/// file. A page present in the cache is the single authoritative copy.
pub struct Pager {
    file: File,
    file_length: u64,
    num_pages: PageId,
    pages: HashMap<PageId, Page>,
}

impl Pager {
    /// Open (creating if absent) the backing file. A file length that is
    /// not a whole multiple of the page size is a corruption signal and
    /// fails the open.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DatabaseError> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;
        let file_length = file.metadata()?.len();

        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(DatabaseError::CorruptedFile {
                reason: format!(
                    "file length {} is not a whole number of pages",
                    file_length
                ),
            });
        }

        Ok(Self {
            file,
            file_length,
            num_pages: (file_length / PAGE_SIZE as u64) as PageId,
            pages: HashMap::new(),
        })
    }

    /// Number of pages known to exist, counting pages touched this
    /// session that have not been flushed yet.
    pub fn num_pages(&self) -> PageId {
        self.num_pages
    }

    pub fn is_loaded(&self, page_num: PageId) -> bool {
        self.pages.contains_key(&page_num)
    }

    /// Fetch a page buffer, reading it from the file on first access. A
    /// page number past the file's extent comes back zeroed, a brand-new
    /// empty page. Repeated calls return the same buffer.
    pub fn get_page(&mut self, page_num: PageId) -> Result<&mut Page, DatabaseError> {
        if page_num >= TABLE_MAX_PAGES {
            return Err(DatabaseError::PageOutOfBounds {
                page_num,
                max: TABLE_MAX_PAGES,
            });
        }

        if !self.pages.contains_key(&page_num) {
            let mut page = Page::zeroed();
            let mut pages_on_disk = (self.file_length / PAGE_SIZE as u64) as PageId;
            // A final partial page counts as one more page to read.
            if self.file_length % PAGE_SIZE as u64 != 0 {
                pages_on_disk += 1;
            }

            if page_num < pages_on_disk {
                self.file
                    .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
                let available = (self.file_length - page_num as u64 * PAGE_SIZE as u64)
                    .min(PAGE_SIZE as u64) as usize;
                self.file.read_exact(&mut page.as_bytes_mut()[..available])?;
            }

            self.pages.insert(page_num, page);
            if page_num >= self.num_pages {
                self.num_pages = page_num + 1;
            }
        }

        Ok(self.pages.get_mut(&page_num).expect("page just inserted"))
    }

    /// Write `size` bytes of the cached page to its file offset. `size`
    /// is the full page size except for a final partial page, so the file
    /// never carries trailing garbage past the last real cell.
    pub fn flush(&mut self, page_num: PageId, size: usize) -> Result<(), DatabaseError> {
        let page = self
            .pages
            .get(&page_num)
            .ok_or(DatabaseError::FlushUnloadedPage { page_num })?;

        self.file
            .seek(SeekFrom::Start(page_num as u64 * PAGE_SIZE as u64))?;
        self.file.write_all(&page.as_bytes()[..size])?;
        self.file.flush()?;

        let end = page_num as u64 * PAGE_SIZE as u64 + size as u64;
        if end > self.file_length {
            self.file_length = end;
        }
        Ok(())
    }

    /// Release every cached buffer. Called once, at table close, after
    /// the flush pass.
    pub fn release(&mut self) {
        self.pages.clear();
    }
}
