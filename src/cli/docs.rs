//! Documentation content for the hyperchunks CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Sections,
    Selectors,
    Attributes,
    Literals,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "sections" | "section" | "syntax" => Some(Self::Sections),
            "selectors" | "selector" | "slices" | "hyperslices" => Some(Self::Selectors),
            "attributes" | "attribute" | "expressions" | "order" => Some(Self::Attributes),
            "literals" | "literal" | "numbers" | "strings" => Some(Self::Literals),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"HYPERCHUNKS DOCUMENTATION

A hyperchunk selector names which arrays participate, which attributes are of
interest, how results are ordered, and which sub-ranges of each chunk to
extract. Only the arrays section is mandatory.

DOCUMENTATION CATEGORIES

  sections          Layout of a hyperchunk: arrays / attributes / order / hyperslices
  selectors         Ranges, exact indices, ellipsis and hyperslices
  attributes        Attribute indices, comparisons, and/or, function calls
  literals          Integers, floats and strings

QUICK REFERENCE

  0:5               Arrays 0 through 4
  0|3|7             Three array alternatives
  0/a1              Attribute 1 of array 0
  0/a0 > 2 and a1 < 5
                    Rows matching a filter
  0/a0/order:rank(a0)
                    Ordered by a function
  0/a0/0:10,...     First ten rows, all remaining dimensions
  0/a0;1/a1         Two hyperchunks, processed in order

Run 'hyperchunks doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_name(name) {
        Some(DocCategory::Sections) => Ok(SECTIONS_DOC),
        Some(DocCategory::Selectors) => Ok(SELECTORS_DOC),
        Some(DocCategory::Attributes) => Ok(ATTRIBUTES_DOC),
        Some(DocCategory::Literals) => Ok(LITERALS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SECTIONS_DOC: &str = r#"SECTIONS - Layout of a Hyperchunk

  arrays [/ attributes [/ order:function(...)] [/ hyperslices]]

ARRAYS
  One or more dimension selectors separated by '|'. Mandatory.

    0:5|7         Arrays 0..5 and array 7

ATTRIBUTES
  One or more attribute expressions separated by '|'. When absent, all
  attributes are selected.

    0/a0|a2       Attributes 0 and 2 of array 0

ORDER
  A function call prefixed with 'order:'. Only allowed after attributes.

    0/a0/order:rank(a0, "desc")

HYPERSLICES
  One or more hyperslices separated by '|'. Only allowed after attributes.
  When absent, the full extent of each chunk is selected.

    0/a0/0:10|20:30

SEQUENCES
  Hyperchunks are separated by ';' and processed in order.

    0/a0;1/a1

  Empty sections are errors: '0//a0', '0/a0/' and '0;' are all rejected.
"#;

const SELECTORS_DOC: &str = r#"SELECTORS - Ranges, Indices and Hyperslices

RANGE
  start:stop[:step]
    Any component may be empty. A missing step means a step of 1.

    0:5           Indices 0 through 4
    :10           Up to index 10
    ::2           Every second index
    1:5:          Same as 1:5

EXACT INDEX
  A bare integer selects one index, not a range.

    3
    -1

ELLIPSIS
  ...
    All remaining dimensions.

HYPERSLICE
  One selector per dimension, separated by ','.

    0:10,...      First ten rows, every remaining dimension
    2,0:5,::2
"#;

const ATTRIBUTES_DOC: &str = r#"ATTRIBUTES - Attribute Expressions

ATTRIBUTE INDEX
  a<digits>
    Position of an attribute.

    a0
    a12

COMPARISON
  attribute comparator literal
    Comparators: == != < > <= >=

    a0 >= 3.5
    a2 == "label"

LOGICAL EXPRESSIONS
  Comparisons joined with 'and' / 'or'. 'and' binds tighter than 'or'
  and both group left to right. Parentheses are not supported.

    a0 >= 1 or a1 < 2 and a2 == 3
      is  a0 >= 1 or (a1 < 2 and a2 == 3)

FUNCTION CALLS
  name(argument, ...)
    Arguments are attribute indices, numbers or strings.

    now()
    top(a0, 5)

DIMENSION SELECTORS
  A range, index or ellipsis is also accepted in attribute position.

RESOLUTION ORDER
  Each alternative is tried as a logical expression, then a function call,
  then a bare attribute index, then a dimension selector.
"#;

const LITERALS_DOC: &str = r#"LITERALS - Numbers and Strings

INTEGERS
  [-]digits without leading zeros, or 0.

    42  -7  0       valid
    007 -0          invalid

FLOATS
  A decimal point is required; there is no exponent notation.

    3.5  -.25  007.5  3.      valid
    -3.                       invalid (the trailing-point form takes no sign)

  '3' is always an integer, '3.' always a float.

STRINGS
  Double quoted. A backslash escapes the next character; \n \t \r \f are
  control characters. Strings cannot span lines.

    "x;y"
    "say \"hi\""
"#;
