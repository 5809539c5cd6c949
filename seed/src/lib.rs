//! Loading dictionaries into the word table.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use entity::prelude::*;
use entity::word::ActiveModel;
use indicatif::ProgressBar;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use spellingbee::dictionary::clean_line;

pub const CHUNK_SIZE: usize = 5000;

/// The locale a dictionary file holds, taken from its file stem.
pub fn locale_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_owned)
}

/// Every `.txt` file directly under `directory`, sorted by path.
pub fn dictionary_files<P: AsRef<Path>>(directory: P) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = vec![];

    for entry in fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "txt") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

pub fn read_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words: Vec<String> = vec![];

    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }

    Ok(words)
}

/// Turn a downloaded word list into dictionary lines: cleaned, non-empty,
/// sorted and unique.
pub fn word_list(body: &str) -> Vec<String> {
    let mut words: Vec<String> = body
        .lines()
        .map(|line| clean_line(line.trim()))
        .filter(|word| !word.is_empty())
        .collect();

    words.sort();
    words.dedup();
    words
}

/// Insert `words` for `locale` in batches of [`CHUNK_SIZE`].
pub async fn insert_words(
    db: &DatabaseConnection,
    locale: &str,
    words: &[String],
    progress: &ProgressBar,
) -> Result<usize, DbErr> {
    for batch in words.chunks(CHUNK_SIZE) {
        let models = batch
            .iter()
            .map(|word| ActiveModel::from_word(word, locale));
        Word::insert_many(models).exec(db).await?;
        progress.inc(batch.len() as u64);
    }

    Ok(words.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_locale_from_path() {
        assert_eq!(
            locale_from_path(Path::new("dictionaries/af-za.txt")),
            Some("af-za".to_owned())
        );
        assert_eq!(locale_from_path(Path::new("en")), Some("en".to_owned()));
        assert_eq!(locale_from_path(Path::new("/")), None);
    }

    #[test]
    fn test_read_words() {
        let words = read_words(Cursor::new("woord\n\n  soek \r\nbees\n")).unwrap();

        assert_eq!(words, vec!["woord", "soek", "bees"]);
    }

    #[test]
    fn test_word_list() {
        let body = "zoo/S\nappel2\n\nappel\n  bees \n123\n";

        assert_eq!(word_list(body), vec!["appel", "bees", "zoo"]);
    }

    #[test]
    fn test_dictionary_files() {
        let dir = std::env::temp_dir().join(format!("seed-dictionaries-{}", std::process::id()));
        fs::create_dir_all(dir.join("nested")).unwrap();
        fs::write(dir.join("en.txt"), "word\n").unwrap();
        fs::write(dir.join("af-za.txt"), "woord\n").unwrap();
        fs::write(dir.join("notes.md"), "skip\n").unwrap();

        let files = dictionary_files(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(
            files.unwrap(),
            vec![dir.join("af-za.txt"), dir.join("en.txt")]
        );
    }

    mod database {
        use super::*;
        use entity::word;
        use migration::{Migrator, MigratorTrait};
        use sea_orm::{ColumnTrait, Database, PaginatorTrait, QueryFilter, QueryOrder};

        #[tokio::test]
        async fn test_insert_words() {
            let db = Database::connect("sqlite::memory:").await.unwrap();
            Migrator::up(&db, None).await.unwrap();

            let words: Vec<String> = (0..CHUNK_SIZE + 10).map(|idx| format!("w{idx}")).collect();
            let progress = ProgressBar::hidden();

            let inserted = insert_words(&db, "af-za", &words, &progress).await.unwrap();
            insert_words(&db, "en", &words[..3], &progress).await.unwrap();

            assert_eq!(inserted, CHUNK_SIZE + 10);
            assert_eq!(progress.position(), (CHUNK_SIZE + 13) as u64);
            assert_eq!(
                Word::find()
                    .filter(word::Column::Locale.eq("af-za"))
                    .count(&db)
                    .await
                    .unwrap(),
                (CHUNK_SIZE + 10) as u64
            );

            let first = Word::find()
                .filter(word::Column::Locale.eq("en"))
                .order_by_asc(word::Column::Id)
                .one(&db)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(first.text, "w0");
            assert!(first.in_use);
        }

        #[tokio::test]
        async fn test_insert_nothing() {
            let db = Database::connect("sqlite::memory:").await.unwrap();
            Migrator::up(&db, None).await.unwrap();

            let inserted = insert_words(&db, "en", &[], &ProgressBar::hidden())
                .await
                .unwrap();

            assert_eq!(inserted, 0);
            assert_eq!(Word::find().count(&db).await.unwrap(), 0);
        }
    }
}
