//! Start and end years of every Senate legislature.
//!
//! Legislatures are numbered from 1 (1826-1829). The tables are indexed with
//! `number - 1`.

use crate::error::{Result, SenadoError};

/// Number of legislatures covered by the tables.
pub const LEGISLATURE_COUNT: usize = 55;

/// First calendar year of each legislature.
pub const START_YEARS: [i32; LEGISLATURE_COUNT] = [
    1826, 1830, 1834, 1838, 1843, 1845, 1848, 1850, 1853, 1857, 1861, 1864, 1867, 1869, 1872, 1877,
    1878, 1882, 1885, 1886, 1890, 1891, 1894, 1897, 1900, 1903, 1906, 1909, 1912, 1915, 1918, 1921,
    1924, 1927, 1930, 1933, 1934, 1946, 1951, 1955, 1959, 1963, 1967, 1971, 1975, 1979, 1983, 1987,
    1991, 1995, 1999, 2003, 2007, 2011, 2015,
];

/// Last calendar year of each legislature.
pub const END_YEARS: [i32; LEGISLATURE_COUNT] = [
    1829, 1833, 1837, 1841, 1844, 1847, 1849, 1852, 1856, 1860, 1863, 1866, 1868, 1872, 1875, 1878,
    1881, 1884, 1885, 1889, 1891, 1893, 1896, 1899, 1902, 1905, 1908, 1911, 1915, 1917, 1920, 1923,
    1926, 1929, 1930, 1934, 1937, 1951, 1955, 1959, 1963, 1967, 1970, 1974, 1978, 1983, 1987, 1991,
    1995, 1999, 2003, 2007, 2010, 2015, 2019,
];

/// Look up `(start_year, end_year)` for a legislature number.
///
/// # Examples
/// ```
/// use congresso_senado::legislature::years;
///
/// assert_eq!(years(1).unwrap(), (1826, 1829));
/// assert!(years(0).is_err());
/// ```
pub fn years(number: u32) -> Result<(i32, i32)> {
    let index = usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .filter(|i| *i < LEGISLATURE_COUNT)
        .ok_or(SenadoError::UnknownLegislature(number))?;
    Ok((START_YEARS[index], END_YEARS[index]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        assert_eq!(years(1).unwrap(), (1826, 1829));
        assert_eq!(years(55).unwrap(), (2015, 2019));
    }

    #[test]
    fn test_out_of_range() {
        assert!(years(0).is_err());
        assert!(years(56).is_err());
    }

    #[test]
    fn test_tables_are_consistent() {
        for (start, end) in START_YEARS.iter().zip(END_YEARS.iter()) {
            assert!(start <= end, "{start} > {end}");
        }
    }
}
