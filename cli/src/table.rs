// SPDX-FileCopyrightText: 2025-2026 Voyageur Developers <dev@voyageur.travel>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt, marker::PhantomData};

use colored::{Color, Colorize};
use unicode_width::UnicodeWidthStr;

pub trait TableColumn<T> {
    /// Header of the column, also the key of the JSON output.
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }

    fn get_color(&self, _data: &T) -> Option<Color> {
        None
    }
}

pub trait TableStyle {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result;
}

pub struct Table<'a, S: TableStyle, T, C: TableColumn<T>> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, T, C: TableColumn<T>> Table<'a, S, T, C> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, T, C: TableColumn<T>> fmt::Display for Table<'_, S, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.style.write(f, self.columns, self.data)
    }
}

/// Aligned, colored columns separated by spaces, one row per line.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: String,
    padding: bool,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self {
            separator: " ".to_string(),
            padding: true,
        }
    }
}

impl TableStyle for TableStyleBasic {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let table: Vec<Vec<Cow<'_, str>>> = data
            .iter()
            .map(|row| columns.iter().map(|col| col.format(row)).collect())
            .collect();

        let widths = self
            .padding
            .then(|| get_column_max_width(columns.len(), &table));

        for (cells, row) in table.into_iter().zip(data) {
            for (j, (col, cell)) in columns.iter().zip(cells).enumerate() {
                let last = j + 1 == columns.len();
                let stylizer = ColumnStylizer {
                    column: col,
                    padding: match (&widths, col.padding_direction()) {
                        // Last column does not need padding if it's left-aligned
                        (Some(_), PaddingDirection::Left) if last => None,
                        (Some(w), direction) => Some((w[j], direction)),
                        (None, _) => None,
                    },
                    _marker: PhantomData,
                };
                write!(f, "{}", stylizer.stylize_cell(row, &cell))?;

                if last {
                    writeln!(f)?;
                } else {
                    write!(f, "{}", self.separator)?;
                }
            }
        }

        Ok(())
    }
}

/// An array of objects keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write<T, C: TableColumn<T>>(
        &self,
        f: &mut fmt::Formatter<'_>,
        columns: &[C],
        data: &[T],
    ) -> fmt::Result {
        let rows: Vec<serde_json::Value> = data
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|col| {
                        (
                            col.name().into_owned(),
                            serde_json::Value::String(col.format(row).into_owned()),
                        )
                    })
                    .collect::<serde_json::Map<_, _>>()
                    .into()
            })
            .collect();

        let json = serde_json::to_string_pretty(&rows).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

struct ColumnStylizer<'a, T, C: TableColumn<T>> {
    column: &'a C,
    /// padding width and direction
    padding: Option<(usize, PaddingDirection)>,
    _marker: PhantomData<T>,
}

impl<T, C: TableColumn<T>> ColumnStylizer<'_, T, C> {
    fn stylize_cell(&self, data: &T, cell: &str) -> String {
        let cell = match self.padding {
            Some((width, direction)) => pad(cell, width, direction),
            None => cell.to_string(),
        };

        match self.column.get_color(data) {
            Some(color) => cell.color(color).to_string(),
            None => cell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Pads by display width, so wide characters line up.
fn pad(cell: &str, width: usize, direction: PaddingDirection) -> String {
    let fill = " ".repeat(width.saturating_sub(cell.width()));
    match direction {
        PaddingDirection::Left => format!("{cell}{fill}"),
        PaddingDirection::Right => format!("{fill}{cell}"),
    }
}

fn get_column_max_width(columns: usize, table: &[Vec<Cow<'_, str>>]) -> Vec<usize> {
    let mut max_width = vec![0; columns];
    for row in table {
        for (max, cell) in max_width.iter_mut().zip(row) {
            *max = (*max).max(cell.width());
        }
    }
    max_width
}
