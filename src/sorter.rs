//! Natural and by-count sorters
//!
//! Both sorters start with a `Total <label>: <n>.` summary line. The natural
//! sorter then prints every item in ascending order on a single `Sorted data:`
//! record; the by-count sorter prints one line per distinct item, least
//! frequent first, with ties broken by natural order.

use crate::config::{DataType, SortConfig, SortingType};
use crate::parser::Items;
use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

/// Anything the sorters can order, count and print
pub trait SortItem: Ord + Hash + Display {}

impl<T: Ord + Hash + Display> SortItem for T {}

pub trait Sorter {
    fn sort_and_print<T: SortItem>(
        &self,
        items: Vec<T>,
        output: &mut dyn Write,
    ) -> io::Result<()>;
}

/// Pick the sorter for `config` and write the result for `items`
pub fn sort_and_print(
    config: &SortConfig,
    items: Items,
    output: &mut dyn Write,
) -> io::Result<()> {
    let data_type = config.data_type;
    match config.sorting_type {
        SortingType::Natural => dispatch(&NaturalOrderSorter::new(data_type), items, output),
        SortingType::ByCount => dispatch(&ByCountSorter::new(data_type), items, output),
    }
}

fn dispatch<S: Sorter>(sorter: &S, items: Items, output: &mut dyn Write) -> io::Result<()> {
    match items {
        Items::Numbers(numbers) => sorter.sort_and_print(numbers, output),
        Items::Text(text) => sorter.sort_and_print(text, output),
    }
}

fn write_total(output: &mut dyn Write, data_type: DataType, total: usize) -> io::Result<()> {
    writeln!(output, "Total {}: {}.", data_type.plural_label(), total)
}

pub struct NaturalOrderSorter {
    data_type: DataType,
}

impl NaturalOrderSorter {
    pub fn new(data_type: DataType) -> Self {
        Self { data_type }
    }
}

impl Sorter for NaturalOrderSorter {
    fn sort_and_print<T: SortItem>(
        &self,
        mut items: Vec<T>,
        output: &mut dyn Write,
    ) -> io::Result<()> {
        items.sort();

        write_total(output, self.data_type, items.len())?;
        let delimiter = self.data_type.delimiter();
        writeln!(output, "Sorted data:{}{}", delimiter, items.iter().join(delimiter))
    }
}

pub struct ByCountSorter {
    data_type: DataType,
}

impl ByCountSorter {
    pub fn new(data_type: DataType) -> Self {
        Self { data_type }
    }
}

impl Sorter for ByCountSorter {
    fn sort_and_print<T: SortItem>(
        &self,
        items: Vec<T>,
        output: &mut dyn Write,
    ) -> io::Result<()> {
        let total = items.len();
        write_total(output, self.data_type, total)?;
        if total == 0 {
            return Ok(());
        }

        for (count, bucket) in frequency_buckets(items) {
            let share = percentage(count, total);
            for item in bucket {
                writeln!(output, "{item}: {count} time(s), {share}%")?;
            }
        }

        Ok(())
    }
}

/// Group distinct items by how often they occur, in ascending count order
pub fn frequency_buckets<T: SortItem>(items: Vec<T>) -> BTreeMap<usize, BTreeSet<T>> {
    items
        .into_iter()
        .counts()
        .into_iter()
        .fold(BTreeMap::new(), |mut buckets, (item, count)| {
            buckets.entry(count).or_default().insert(item);
            buckets
        })
}

/// `floor(count * 100 / total)`; `total` must be non-zero
fn percentage(count: usize, total: usize) -> usize {
    count * 100 / total
}
