//! The built-in menu tree.

use super::MenuNode;

/// Heading shown above the menu bar unless overridden in config.
pub const DEFAULT_HEADING: &str = "5-Level Dropdown Menu";

/// Build the menu tree displayed by the application.
pub fn sample_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::leaf("1", "Home", "/"),
        MenuNode::branch(
            "2",
            "Products",
            vec![
                MenuNode::branch(
                    "2-1",
                    "Electronics",
                    vec![
                        MenuNode::branch(
                            "2-1-1",
                            "Mobile Phones",
                            vec![
                                MenuNode::leaf(
                                    "2-1-1-1",
                                    "Smartphones",
                                    "/products/electronics/phones/smartphones",
                                ),
                                MenuNode::leaf(
                                    "2-1-1-2",
                                    "Feature Phones",
                                    "/products/electronics/phones/feature-phones",
                                ),
                            ],
                        ),
                        MenuNode::leaf("2-1-2", "Laptops", "/products/electronics/laptops"),
                        MenuNode::branch(
                            "2-1-3",
                            "Notebooks",
                            vec![
                                MenuNode::leaf(
                                    "2-1-3-1",
                                    "Book",
                                    "/products/electronics/phones/smartphones",
                                ),
                                MenuNode::leaf(
                                    "2-1-3-2",
                                    "Diary",
                                    "/products/electronics/phones/feature-phones",
                                ),
                            ],
                        ),
                    ],
                ),
                MenuNode::leaf("2-2", "Furniture", "/products/furniture"),
            ],
        ),
        MenuNode::leaf("3", "About Us", "/about"),
    ]
}
