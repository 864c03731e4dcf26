//! Built-in catalog definitions - SINGLE SOURCE OF TRUTH
//!
//! Definition order is display order: category pages, the popular list and
//! search results all follow the order of the entries below.

use super::{Category, Tool};

/// Number of built-in categories.
pub const BUILTIN_CATEGORY_COUNT: usize = 4;

/// Number of built-in tools.
pub const BUILTIN_TOOL_COUNT: usize = 31;

/// Returns all built-in categories in display order.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new("calculators", "Calculators", "/calculators"),
        Category::new("converters", "Converters", "/converters"),
        Category::new("text-tools", "Text Tools", "/text-tools"),
        Category::new("generators", "Generators", "/generators"),
    ]
}

/// Every tool page lives under `/tools/<id>`.
fn tool(id: &str, name: &str, description: &str, category: &str, icon: &str) -> Tool {
    Tool::new(id, name, description, category, format!("/tools/{id}"), icon)
}

/// Returns all built-in tools in display order.
pub fn builtin_tools() -> Vec<Tool> {
    vec![
        // Calculators (11 tools)
        tool(
            "age-calculator",
            "Age Calculator",
            "Calculate your exact age in years, months and days from a date of birth",
            "calculators",
            "calendar",
        )
        .popular(),
        tool(
            "bmi-calculator",
            "BMI Calculator",
            "Work out your body mass index from height and weight",
            "calculators",
            "activity",
        )
        .popular(),
        tool(
            "compound-interest-calculator",
            "Compound Interest Calculator",
            "See how savings grow with interest compounded over time",
            "calculators",
            "trending-up",
        ),
        tool(
            "discount-calculator",
            "Discount Calculator",
            "Find the final price and savings after a percentage discount",
            "calculators",
            "tag",
        ),
        tool(
            "grade-calculator",
            "Grade Calculator",
            "Compute a weighted average grade from assignment scores",
            "calculators",
            "graduation-cap",
        ),
        tool(
            "loan-calculator",
            "Loan Calculator",
            "Estimate monthly repayments and total interest on a loan",
            "calculators",
            "landmark",
        )
        .popular(),
        tool(
            "mortgage-calculator",
            "Mortgage Calculator",
            "Estimate monthly mortgage payments including principal and interest",
            "calculators",
            "home",
        )
        .popular(),
        tool(
            "percentage-calculator",
            "Percentage Calculator",
            "Calculate percentages, percentage change and what share one number is of another",
            "calculators",
            "percent",
        )
        .popular(),
        tool(
            "sales-tax-calculator",
            "Sales Tax Calculator",
            "Add or remove sales tax from a price",
            "calculators",
            "receipt",
        ),
        tool(
            "tip-calculator",
            "Tip Calculator",
            "Work out the tip and split the bill between people",
            "calculators",
            "hand-coins",
        )
        .popular(),
        tool(
            "unit-price-calculator",
            "Unit Price Calculator",
            "Compare products by price per unit to find the better deal",
            "calculators",
            "scale",
        ),
        // Converters (8 tools)
        tool(
            "temperature-converter",
            "Temperature Converter",
            "Convert between Celsius, Fahrenheit and Kelvin",
            "converters",
            "thermometer",
        )
        .popular(),
        tool(
            "length-converter",
            "Length Converter",
            "Convert between metres, feet, inches, miles and more",
            "converters",
            "ruler",
        ),
        tool(
            "weight-converter",
            "Weight Converter",
            "Convert between kilograms, pounds, ounces and stones",
            "converters",
            "weight",
        ),
        tool(
            "volume-converter",
            "Volume Converter",
            "Convert between litres, gallons, cups and millilitres",
            "converters",
            "beaker",
        ),
        tool(
            "area-converter",
            "Area Converter",
            "Convert between square metres, square feet, acres and hectares",
            "converters",
            "square",
        ),
        tool(
            "speed-converter",
            "Speed Converter",
            "Convert between km/h, mph, metres per second and knots",
            "converters",
            "gauge",
        ),
        tool(
            "data-storage-converter",
            "Data Storage Converter",
            "Convert between bytes, kilobytes, megabytes, gigabytes and terabytes",
            "converters",
            "hard-drive",
        ),
        tool(
            "number-base-converter",
            "Number Base Converter",
            "Convert numbers between binary, octal, decimal and hexadecimal",
            "converters",
            "binary",
        ),
        // Text tools (6 tools)
        tool(
            "word-counter",
            "Word Counter",
            "Count words, characters, sentences and paragraphs in text",
            "text-tools",
            "file-text",
        )
        .popular(),
        tool(
            "character-counter",
            "Character Counter",
            "Count characters with and without spaces",
            "text-tools",
            "type",
        ),
        tool(
            "case-converter",
            "Case Converter",
            "Change text to uppercase, lowercase, title case or sentence case",
            "text-tools",
            "case-sensitive",
        ),
        tool(
            "text-reverser",
            "Text Reverser",
            "Reverse the order of characters or words in text",
            "text-tools",
            "arrow-left-right",
        ),
        tool(
            "remove-duplicate-lines",
            "Remove Duplicate Lines",
            "Strip repeated lines from a list while keeping the original order",
            "text-tools",
            "list-x",
        ),
        tool(
            "slug-generator",
            "Slug Generator",
            "Turn a title into a URL-friendly slug",
            "text-tools",
            "link",
        ),
        // Generators (6 tools)
        tool(
            "uuid-generator",
            "UUID Generator",
            "Generate random version 4 UUIDs",
            "generators",
            "fingerprint",
        )
        .popular(),
        tool(
            "password-generator",
            "Password Generator",
            "Create strong random passwords with custom length and character sets",
            "generators",
            "key-round",
        )
        .popular(),
        tool(
            "lorem-ipsum-generator",
            "Lorem Ipsum Generator",
            "Generate placeholder text by paragraphs, sentences or words",
            "generators",
            "text",
        ),
        tool(
            "random-number-generator",
            "Random Number Generator",
            "Pick random numbers within a range",
            "generators",
            "dices",
        ),
        tool(
            "qr-code-generator",
            "QR Code Generator",
            "Create QR codes for links, text and contact details",
            "generators",
            "qr-code",
        ),
        tool(
            "color-palette-generator",
            "Color Palette Generator",
            "Build harmonious colour palettes from a base colour",
            "generators",
            "palette",
        ),
    ]
}
