use std::{path::Path, sync::Arc};

use anyhow::{bail, Result as Fallible};
use parking_lot::Mutex;
use tantivy::{
    collector::TopDocs,
    directory::MmapDirectory,
    query::{BooleanQuery, FuzzyTermQuery, Occur, Query, TermQuery},
    schema::*,
    tokenizer::{LowerCaser, NgramTokenizer, TextAnalyzer},
    DocAddress, Index, IndexReader, IndexWriter, ReloadPolicy, Score, TantivyDocument, Term,
};

use cropdb_core::{
    db::{CropIndex, CropIndexer, IdIndexer, IndexedCrop, Indexer},
    entities::Id,
};

const OVERALL_INDEX_HEAP_SIZE_IN_BYTES: usize = 50_000_000;

const ID_TOKENIZER: &str = "raw";
const NGRAM_TOKENIZER: &str = "ngram";
const WORD_TOKENIZER: &str = "default";

const MIN_NGRAM_LEN: usize = 1;
const MAX_NGRAM_LEN: usize = 20;

// Shorter words would fuzzy match almost anything
const MIN_FUZZY_WORD_LEN: usize = 3;
const MAX_FUZZY_DISTANCE: u8 = 1;

struct TantivyCropFields {
    id: Field,
    // Every name of the crop split into substrings
    names: Field,
    // Every name of the crop split into words
    words: Field,
}

fn build_schema() -> (Schema, TantivyCropFields) {
    let id_options = TextOptions::default()
        .set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(ID_TOKENIZER)
                .set_index_option(IndexRecordOption::Basic),
        )
        .set_stored();
    let names_options = TextOptions::default().set_indexing_options(
        TextFieldIndexing::default()
            .set_tokenizer(NGRAM_TOKENIZER)
            .set_index_option(IndexRecordOption::WithFreqs),
    );
    let words_options = TextOptions::default().set_indexing_options(
        TextFieldIndexing::default()
            .set_tokenizer(WORD_TOKENIZER)
            .set_index_option(IndexRecordOption::WithFreqs),
    );
    let mut schema_builder = SchemaBuilder::default();
    let id = schema_builder.add_text_field("id", id_options);
    let names = schema_builder.add_text_field("names", names_options);
    let words = schema_builder.add_text_field("words", words_options);
    let schema = schema_builder.build();
    let fields = TantivyCropFields { id, names, words };
    (schema, fields)
}

fn register_tokenizers(index: &Index) -> Fallible<()> {
    // Predefined tokenizers
    debug_assert!(index.tokenizers().get(ID_TOKENIZER).is_some());
    debug_assert!(index.tokenizers().get(WORD_TOKENIZER).is_some());
    // Custom tokenizer(s)
    debug_assert!(index.tokenizers().get(NGRAM_TOKENIZER).is_none());
    let ngram_tokenizer =
        TextAnalyzer::builder(NgramTokenizer::new(MIN_NGRAM_LEN, MAX_NGRAM_LEN, false)?)
            .filter(LowerCaser)
            .build();
    index.tokenizers().register(NGRAM_TOKENIZER, ngram_tokenizer);
    Ok(())
}

struct TantivyCropIndex {
    fields: TantivyCropFields,
    reader: IndexReader,
    writer: IndexWriter,
}

impl TantivyCropIndex {
    fn create_in_ram() -> Fallible<Self> {
        let no_path: Option<&Path> = None;
        Self::create(no_path)
    }

    fn create<P: AsRef<Path>>(path: Option<P>) -> Fallible<Self> {
        let (schema, fields) = build_schema();

        let index = if let Some(path) = path {
            let path = path.as_ref();
            log::info!(
                "Opening full-text search index in directory: {}",
                path.to_string_lossy()
            );
            std::fs::create_dir_all(path)?;
            Index::open_or_create(MmapDirectory::open(path)?, schema)?
        } else {
            log::warn!("Creating full-text search index in RAM");
            Index::create_in_ram(schema)
        };

        register_tokenizers(&index)?;

        let reader = index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?;
        let writer = index.writer(OVERALL_INDEX_HEAP_SIZE_IN_BYTES)?;
        Ok(Self {
            fields,
            reader,
            writer,
        })
    }

    fn add_or_update_crop(&self, crop: &IndexedCrop) -> Fallible<()> {
        let id_term = Term::from_field_text(self.fields.id, crop.id.as_str());
        self.writer.delete_term(id_term);
        let mut doc = TantivyDocument::default();
        doc.add_text(self.fields.id, crop.id.as_str());
        for name in std::iter::once(&crop.name)
            .chain(&crop.scientific_names)
            .chain(&crop.alternate_names)
        {
            doc.add_text(self.fields.names, name);
            doc.add_text(self.fields.words, name);
        }
        self.writer.add_document(doc)?;
        Ok(())
    }

    fn remove_by_id(&self, id: &Id) -> Fallible<()> {
        let id_term = Term::from_field_text(self.fields.id, id.as_str());
        self.writer.delete_term(id_term);
        Ok(())
    }

    fn remove_all(&self) -> Fallible<()> {
        self.writer.delete_all_documents()?;
        Ok(())
    }

    fn flush(&mut self) -> Fallible<()> {
        self.writer.commit()?;
        self.reader.reload()?;
        Ok(())
    }

    // Query words longer than the longest n-gram are matched by
    // all of their n-grams.
    fn substring_query(&self, word: &str) -> Box<dyn Query> {
        let chars: Vec<_> = word.chars().collect();
        if chars.len() <= MAX_NGRAM_LEN {
            let term = Term::from_field_text(self.fields.names, word);
            return Box::new(TermQuery::new(term, IndexRecordOption::Basic));
        }
        let ngram_queries: Vec<(Occur, Box<dyn Query>)> = chars
            .windows(MAX_NGRAM_LEN)
            .map(|ngram| {
                let ngram: String = ngram.iter().collect();
                let term = Term::from_field_text(self.fields.names, &ngram);
                let query: Box<dyn Query> =
                    Box::new(TermQuery::new(term, IndexRecordOption::Basic));
                (Occur::Must, query)
            })
            .collect();
        Box::new(BooleanQuery::from(ngram_queries))
    }

    fn word_query(&self, word: &str) -> Box<dyn Query> {
        let substring_query = self.substring_query(word);
        if word.chars().count() < MIN_FUZZY_WORD_LEN {
            return substring_query;
        }
        let term = Term::from_field_text(self.fields.words, word);
        let fuzzy_query = FuzzyTermQuery::new(term, MAX_FUZZY_DISTANCE, true);
        Box::new(BooleanQuery::from(vec![
            (Occur::Should, substring_query),
            (Occur::Should, Box::new(fuzzy_query) as Box<dyn Query>),
        ]))
    }

    fn query_crops(&self, text: &str, limit: usize) -> Fallible<Vec<Id>> {
        if limit == 0 {
            bail!("Invalid limit: {}", limit);
        }
        let word_queries: Vec<(Occur, Box<dyn Query>)> = text
            .split_whitespace()
            .map(str::to_lowercase)
            .map(|word| (Occur::Must, self.word_query(&word)))
            .collect();
        if word_queries.is_empty() {
            return Ok(vec![]);
        }
        let query = BooleanQuery::from(word_queries);
        let searcher = self.reader.searcher();
        let top_docs: Vec<(Score, DocAddress)> =
            searcher.search(&query, &TopDocs::with_limit(limit))?;
        let mut ids = Vec::with_capacity(top_docs.len());
        for (_score, doc_addr) in top_docs {
            match searcher.doc::<TantivyDocument>(doc_addr) {
                Ok(doc) => {
                    if let Some(id) = doc.get_first(self.fields.id).and_then(|v| v.as_str()) {
                        ids.push(Id::from(id));
                    } else {
                        log::error!("Missing crop id in document {:?}", doc_addr);
                    }
                }
                Err(err) => {
                    log::warn!("Failed to load document {:?}: {}", doc_addr, err);
                }
            }
        }
        Ok(ids)
    }
}

/// Full-text search over the names of approved crops.
///
/// All clones share the same index.
#[derive(Clone)]
pub struct SearchEngine(Arc<Mutex<TantivyCropIndex>>);

impl SearchEngine {
    pub fn init_in_ram() -> Fallible<SearchEngine> {
        let crop_index = TantivyCropIndex::create_in_ram()?;
        Ok(SearchEngine(Arc::new(Mutex::new(crop_index))))
    }

    /// Opens the index in `path` or creates a new one if it does not exist yet.
    ///
    /// Without a path the index is kept in RAM.
    pub fn init_with_path<P: AsRef<Path>>(path: Option<P>) -> Fallible<SearchEngine> {
        let crop_index = TantivyCropIndex::create(path)?;
        Ok(SearchEngine(Arc::new(Mutex::new(crop_index))))
    }
}

impl Indexer for SearchEngine {
    fn flush_index(&mut self) -> Fallible<()> {
        self.0.lock().flush()
    }
}

impl IdIndexer for SearchEngine {
    fn remove_by_id(&self, id: &Id) -> Fallible<()> {
        self.0.lock().remove_by_id(id)
    }
}

impl CropIndex for SearchEngine {
    fn query_crops(&self, text: &str, limit: usize) -> Fallible<Vec<Id>> {
        self.0.lock().query_crops(text, limit)
    }
}

impl CropIndexer for SearchEngine {
    fn add_or_update_crop(&self, crop: &IndexedCrop) -> Fallible<()> {
        self.0.lock().add_or_update_crop(crop)
    }

    fn remove_all_crops(&self) -> Fallible<()> {
        self.0.lock().remove_all()
    }
}
