use super::base::StorageError;
use crate::models::{Product, PRODUCT_FIELDS};
use csv::{Terminator, WriterBuilder};
use log::debug;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Writes one `{category}.csv` per category into a base directory.
#[derive(Debug, Clone)]
pub struct CsvStorage {
    base_path: PathBuf,
}

impl CsvStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, StorageError> {
        let base_path = base_path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn path_for(&self, category: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", category))
    }

    /// Truncates and rewrites the category file. The header row is written
    /// even when there are no products.
    pub fn save(&self, category: &str, products: &[Product]) -> Result<PathBuf, StorageError> {
        let path = self.path_for(category);
        let file = File::create(&path)?;
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        writer.write_record(PRODUCT_FIELDS)?;
        for product in products {
            writer.serialize(product)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", products.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::Reader;
    use tempfile::tempdir;

    fn product(title: &str, price: f64, rating: u32, reviews: u32) -> Product {
        Product {
            title: title.to_string(),
            description: format!("{} description, 16GB", title),
            price,
            rating,
            num_of_reviews: reviews,
        }
    }

    fn read_back(path: &Path) -> (Vec<String>, Vec<Product>) {
        let mut reader = Reader::from_path(path).unwrap();
        let headers = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        let rows = reader.deserialize().map(|row| row.unwrap()).collect();
        (headers, rows)
    }

    #[test]
    fn test_empty_category_still_gets_header() {
        let dir = tempdir().unwrap();
        let storage = CsvStorage::new(dir.path()).unwrap();

        let path = storage.save("home", &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "title,description,price,rating,num_of_reviews\r\n");
        let (headers, rows) = read_back(&path);
        assert_eq!(headers, PRODUCT_FIELDS);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_single_product_row() {
        let dir = tempdir().unwrap();
        let storage = CsvStorage::new(dir.path()).unwrap();

        let path = storage
            .save("phones", &[product("Nokia X", 299.0, 3, 21)])
            .unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.split("\r\n").filter(|l| !l.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Nokia X,\"Nokia X description, 16GB\",299.0,3,21");
    }

    #[test]
    fn test_many_products_read_back_in_order() {
        let dir = tempdir().unwrap();
        let storage = CsvStorage::new(dir.path()).unwrap();
        let products: Vec<Product> = (0..40)
            .map(|i| product(&format!("Laptop {}", i), 100.5 + i as f64, i % 6, i * 2))
            .collect();

        let path = storage.save("laptops", &products).unwrap();

        let (headers, rows) = read_back(&path);
        assert_eq!(headers.len(), 5);
        assert_eq!(rows, products);
        assert_eq!(path, dir.path().join("laptops.csv"));
    }

    #[test]
    fn test_save_truncates_previous_contents() {
        let dir = tempdir().unwrap();
        let storage = CsvStorage::new(dir.path()).unwrap();
        storage
            .save("tablets", &[product("A", 1.0, 1, 1), product("B", 2.0, 2, 2)])
            .unwrap();

        let path = storage.save("tablets", &[product("C", 3.0, 3, 3)]).unwrap();

        let (_, rows) = read_back(&path);
        assert_eq!(rows, vec![product("C", 3.0, 3, 3)]);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let storage = CsvStorage::new(dir.path().join("out")).unwrap();
        fs::remove_dir_all(storage.base_path()).unwrap();

        let result = storage.save("touch", &[]);
        assert!(matches!(result, Err(StorageError::Io(_))));
    }
}
