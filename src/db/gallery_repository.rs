// src/db/gallery_repository.rs
// DOCUMENTATION: Gallery image database operations
// PURPOSE: Persist gallery records and list them with their hotel category

use super::persistence_error;
use crate::errors::HotelError;
use crate::models::{GalleryImage, GalleryImageRow, NewGalleryImage};
use sqlx::PgPool;

/// Columns shared by every gallery query, aliased for GalleryImageRow
const GALLERY_COLUMNS: &str = r#"
    gi.id, gi.url, gi.public_id, gi.category, gi.caption, gi.category_id, gi.created_at,
    hc.title AS hotel_category_title, hc.slug AS hotel_category_slug
"#;

/// Storage interface for gallery records
/// DOCUMENTATION: PostgreSQL in production; handlers only see this trait
#[async_trait::async_trait]
pub trait GalleryStore: Send + Sync {
    /// All records, newest first, with category joined
    async fn list(&self) -> Result<Vec<GalleryImage>, HotelError>;

    /// Insert a record and return it with category joined
    async fn create(&self, image: &NewGalleryImage) -> Result<GalleryImage, HotelError>;

    async fn find(&self, id: i32) -> Result<Option<GalleryImage>, HotelError>;

    /// Remove a record; false when it did not exist
    async fn delete(&self, id: i32) -> Result<bool, HotelError>;
}

/// PostgreSQL implementation of GalleryStore
pub struct GalleryRepository {
    pool: PgPool,
}

impl GalleryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GalleryStore for GalleryRepository {
    async fn list(&self) -> Result<Vec<GalleryImage>, HotelError> {
        let sql = format!(
            r#"
            SELECT {GALLERY_COLUMNS}
            FROM gallery_images gi
            LEFT JOIN hotel_categories hc ON hc.id = gi.category_id
            ORDER BY gi.created_at DESC, gi.id DESC
            "#
        );

        let rows = sqlx::query_as::<_, GalleryImageRow>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence_error("Failed to fetch gallery images"))?;

        Ok(rows.into_iter().map(GalleryImageRow::into_image).collect())
    }

    async fn create(&self, image: &NewGalleryImage) -> Result<GalleryImage, HotelError> {
        let sql = format!(
            r#"
            WITH gi AS (
                INSERT INTO gallery_images (url, public_id, category, caption, category_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
            )
            SELECT {GALLERY_COLUMNS}
            FROM gi
            LEFT JOIN hotel_categories hc ON hc.id = gi.category_id
            "#
        );

        let row = sqlx::query_as::<_, GalleryImageRow>(&sql)
            .bind(&image.url)
            .bind(&image.public_id)
            .bind(&image.fields.category)
            .bind(&image.fields.caption)
            .bind(image.fields.category_id)
            .fetch_one(&self.pool)
            .await
            .map_err(persistence_error("Failed to save gallery image"))?;

        Ok(row.into_image())
    }

    async fn find(&self, id: i32) -> Result<Option<GalleryImage>, HotelError> {
        let sql = format!(
            r#"
            SELECT {GALLERY_COLUMNS}
            FROM gallery_images gi
            LEFT JOIN hotel_categories hc ON hc.id = gi.category_id
            WHERE gi.id = $1
            "#
        );

        let row = sqlx::query_as::<_, GalleryImageRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(persistence_error("Failed to fetch gallery image"))?;

        Ok(row.map(GalleryImageRow::into_image))
    }

    async fn delete(&self, id: i32) -> Result<bool, HotelError> {
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(persistence_error("Failed to delete gallery image"))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::models::CategorySummary;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Mutex;

    /// In-memory GalleryStore; timestamps advance one minute per insert
    #[derive(Default)]
    pub struct MemoryGalleryStore {
        pub images: Mutex<Vec<GalleryImage>>,
        pub categories: Vec<CategorySummary>,
    }

    impl MemoryGalleryStore {
        pub fn insert_count(&self) -> usize {
            self.images.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl GalleryStore for MemoryGalleryStore {
        async fn list(&self) -> Result<Vec<GalleryImage>, HotelError> {
            let mut images = self.images.lock().unwrap().clone();
            images.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(images)
        }

        async fn create(&self, image: &NewGalleryImage) -> Result<GalleryImage, HotelError> {
            let mut images = self.images.lock().unwrap();
            let id = images.len() as i32 + 1;
            let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

            let created = GalleryImage {
                id,
                url: image.url.clone(),
                public_id: image.public_id.clone(),
                category: image.fields.category.clone(),
                caption: image.fields.caption.clone(),
                category_id: image.fields.category_id,
                created_at: base + Duration::minutes(id as i64),
                hotel_category: image
                    .fields
                    .category_id
                    .and_then(|cid| self.categories.iter().find(|c| c.id == cid).cloned()),
            };
            images.push(created.clone());
            Ok(created)
        }

        async fn find(&self, id: i32) -> Result<Option<GalleryImage>, HotelError> {
            Ok(self.images.lock().unwrap().iter().find(|i| i.id == id).cloned())
        }

        async fn delete(&self, id: i32) -> Result<bool, HotelError> {
            let mut images = self.images.lock().unwrap();
            let before = images.len();
            images.retain(|i| i.id != id);
            Ok(images.len() < before)
        }
    }

    /// GalleryStore whose every query fails the way an unreachable pool does
    pub struct UnreachableGalleryStore;

    impl UnreachableGalleryStore {
        fn fail<T>(message: &'static str) -> Result<T, HotelError> {
            Err(persistence_error(message)(sqlx::Error::PoolTimedOut))
        }
    }

    #[async_trait::async_trait]
    impl GalleryStore for UnreachableGalleryStore {
        async fn list(&self) -> Result<Vec<GalleryImage>, HotelError> {
            Self::fail("Failed to fetch gallery images")
        }

        async fn create(&self, _image: &NewGalleryImage) -> Result<GalleryImage, HotelError> {
            Self::fail("Failed to save gallery image")
        }

        async fn find(&self, _id: i32) -> Result<Option<GalleryImage>, HotelError> {
            Self::fail("Failed to fetch gallery image")
        }

        async fn delete(&self, _id: i32) -> Result<bool, HotelError> {
            Self::fail("Failed to delete gallery image")
        }
    }
}
