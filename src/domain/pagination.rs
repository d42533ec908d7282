// src/domain/pagination.rs
//! Offset pagination primitives shared by repositories and services.
//!
//! A [`PageRequest`] selects one window of a sorted result set and a [`Slice`]
//! carries that window back together with a flag telling whether another
//! window follows. Slices never report a total count.
use crate::domain::errors::{DomainError, DomainResult};
use std::str::FromStr;

pub const MAX_PAGE_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "unknown sort direction: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOrder<P> {
    pub property: P,
    pub direction: SortDirection,
}

impl<P> SortOrder<P> {
    pub const fn asc(property: P) -> Self {
        Self {
            property,
            direction: SortDirection::Asc,
        }
    }

    pub const fn desc(property: P) -> Self {
        Self {
            property,
            direction: SortDirection::Desc,
        }
    }
}

/// Ordered list of sort criteria. An empty sort means storage order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort<P> {
    orders: Vec<SortOrder<P>>,
}

impl<P> Default for Sort<P> {
    fn default() -> Self {
        Self::unsorted()
    }
}

impl<P> Sort<P> {
    pub const fn unsorted() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn by(order: SortOrder<P>) -> Self {
        Self {
            orders: vec![order],
        }
    }

    #[must_use]
    pub fn and(mut self, order: SortOrder<P>) -> Self {
        self.orders.push(order);
        self
    }

    pub fn orders(&self) -> &[SortOrder<P>] {
        &self.orders
    }

    pub fn is_unsorted(&self) -> bool {
        self.orders.is_empty()
    }
}

impl<P> Sort<P>
where
    P: FromStr<Err = DomainError>,
{
    /// Parses `property[,asc|desc]` criteria separated by `;`.
    pub fn parse(input: &str) -> DomainResult<Self> {
        let mut sort = Self::unsorted();
        for criterion in input.split(';').map(str::trim).filter(|c| !c.is_empty()) {
            let mut parts = criterion.splitn(2, ',');
            let property = parts.next().unwrap_or_default().parse::<P>()?;
            let direction = match parts.next().map(str::trim) {
                Some(dir) if !dir.is_empty() => dir.parse()?,
                _ => SortDirection::Asc,
            };
            sort = sort.and(SortOrder {
                property,
                direction,
            });
        }
        Ok(sort)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest<P> {
    page: u32,
    size: u32,
    sort: Sort<P>,
}

impl<P> PageRequest<P> {
    pub fn of(page: u32, size: u32) -> DomainResult<Self> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(DomainError::Validation(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}"
            )));
        }
        Ok(Self {
            page,
            size,
            sort: Sort::unsorted(),
        })
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Sort<P>) -> Self {
        self.sort = sort;
        self
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub const fn sort(&self) -> &Sort<P> {
        &self.sort
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }

    #[must_use]
    pub fn next(&self) -> Self
    where
        P: Clone,
    {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
            sort: self.sort.clone(),
        }
    }
}

/// One window of results plus whether a further window exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slice<T> {
    content: Vec<T>,
    number: u32,
    size: u32,
    has_next: bool,
}

impl<T> Slice<T> {
    pub const fn new(content: Vec<T>, number: u32, size: u32, has_next: bool) -> Self {
        Self {
            content,
            number,
            size,
            has_next,
        }
    }

    /// Builds a slice from a query that fetched up to `size + 1` rows; the
    /// surplus row only signals that another page exists and is dropped.
    pub fn from_overfetch<P>(mut rows: Vec<T>, request: &PageRequest<P>) -> Self {
        let size = request.size() as usize;
        let has_next = rows.len() > size;
        rows.truncate(size);
        Self::new(rows, request.page(), request.size(), has_next)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub const fn number(&self) -> u32 {
        self.number
    }

    pub const fn size(&self) -> u32 {
        self.size
    }

    pub const fn has_next(&self) -> bool {
        self.has_next
    }

    pub const fn is_first(&self) -> bool {
        self.number == 0
    }

    pub const fn is_last(&self) -> bool {
        !self.has_next
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Slice<U> {
        Slice {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            has_next: self.has_next,
        }
    }
}
