//! Composite: menus hold items and other menus, and both are printed the same way.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::{PatternError, Result};
use std::fmt;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub price: u32,
    pub name: String,
}

impl MenuItem {
    pub fn new(price: u32, name: impl Into<String>) -> Self {
        Self {
            price,
            name: name.into(),
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price: {}    Name: {}", self.price, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuComposite {
    name: String,
    children: Vec<MenuComponent>,
}

impl MenuComposite {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PatternError::BlankMenuName);
        }
        Ok(Self {
            name,
            children: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add(&mut self, child: impl Into<MenuComponent>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[MenuComponent] {
        &self.children
    }
}

impl fmt::Display for MenuComposite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "▀▄ Menu Name: {} ▄▀", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuComponent {
    Item(MenuItem),
    Menu(MenuComposite),
}

impl From<MenuItem> for MenuComponent {
    fn from(item: MenuItem) -> Self {
        MenuComponent::Item(item)
    }
}

impl From<MenuComposite> for MenuComponent {
    fn from(menu: MenuComposite) -> Self {
        MenuComponent::Menu(menu)
    }
}

impl MenuComponent {
    /// Adding below an item is refused; only menus have children.
    pub fn add(&mut self, child: impl Into<MenuComponent>) -> Result<()> {
        match self {
            MenuComponent::Menu(menu) => {
                menu.add(child);
                Ok(())
            }
            MenuComponent::Item(item) => Err(PatternError::CannotAddToLeaf {
                item: item.name.clone(),
            }),
        }
    }

    pub fn print(&self, out: &mut dyn Write) -> Result<()> {
        match self {
            MenuComponent::Item(item) => writeln!(out, "{}", item)?,
            MenuComponent::Menu(menu) => {
                writeln!(out, "{}", menu)?;
                for child in &menu.children {
                    child.print(out)?;
                }
            }
        }
        Ok(())
    }

    /// Every leaf item, depth-first.
    pub fn items(&self) -> Items<'_> {
        Items { stack: vec![self] }
    }

    pub fn total_price(&self) -> u32 {
        self.items().map(|item| item.price).sum()
    }
}

pub struct Items<'a> {
    stack: Vec<&'a MenuComponent>,
}

impl<'a> Iterator for Items<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(component) = self.stack.pop() {
            match component {
                MenuComponent::Item(item) => return Some(item),
                MenuComponent::Menu(menu) => self.stack.extend(menu.children.iter().rev()),
            }
        }
        None
    }
}

pub struct Executor;

impl Executor {
    //            MainMenu
    //      ___________________
    //      |        |         |
    //    Vegan     Fast    Breakfast
    //      |
    //  Exclusive Vegan
    fn build_menu() -> Result<MenuComponent> {
        let mut main_menu = MenuComposite::new("MainMenu")?;
        let mut vegan = MenuComposite::new("Vegan")?;
        let mut exclusive_vegan = MenuComposite::new("Exclusive Vegan")?;
        let mut fast = MenuComposite::new("Fast")?;
        let mut breakfast = MenuComposite::new("Breakfast")?;

        main_menu.add(MenuItem::new(15, "Pancake"));
        main_menu.add(MenuItem::new(5, "Cupcake"));
        vegan.add(MenuItem::new(30, "Tofu"));
        vegan.add(MenuItem::new(32, "Soy pizza"));
        exclusive_vegan.add(MenuItem::new(55, "Very special Tofu"));
        fast.add(MenuItem::new(12, "Pizza"));
        breakfast.add(MenuItem::new(12, "Waffle"));

        vegan.add(exclusive_vegan);
        main_menu.add(vegan);
        main_menu.add(fast);
        main_menu.add(breakfast);
        Ok(main_menu.into())
    }
}

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Composite
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let menu = Self::build_menu()?;
        menu.print(out)?;

        let mut leaf = MenuComponent::from(MenuItem::new(3, "Coffee"));
        if let Err(err) = leaf.add(MenuItem::new(1, "Milk")) {
            writeln!(out, "{}", err)?;
        }

        writeln!(
            out,
            "{} items, total {}",
            menu.items().count(),
            menu.total_price()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_menu_name_rejected() {
        assert!(matches!(
            MenuComposite::new("  "),
            Err(PatternError::BlankMenuName)
        ));
    }

    #[test]
    fn test_items_are_depth_first() {
        let menu = Executor::build_menu().unwrap();
        let names: Vec<&str> = menu.items().map(|item| item.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "Pancake",
                "Cupcake",
                "Tofu",
                "Soy pizza",
                "Very special Tofu",
                "Pizza",
                "Waffle"
            ]
        );
        assert_eq!(menu.total_price(), 15 + 5 + 30 + 32 + 55 + 12 + 12);
    }

    #[test]
    fn test_add_to_leaf_is_an_error() {
        let mut leaf = MenuComponent::from(MenuItem::new(1, "Salt"));
        let err = leaf.add(MenuItem::new(1, "Pepper")).unwrap_err();
        assert!(matches!(err, PatternError::CannotAddToLeaf { ref item } if item == "Salt"));

        let mut menu = MenuComponent::from(MenuComposite::new("Sides").unwrap());
        assert!(menu.add(MenuItem::new(4, "Fries")).is_ok());
        assert_eq!(menu.items().count(), 1);
    }

    #[test]
    fn test_print_walks_the_tree() {
        let mut out = Vec::new();
        Executor::build_menu().unwrap().print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "▀▄ Menu Name: MainMenu ▄▀");
        assert_eq!(lines[3], "▀▄ Menu Name: Vegan ▄▀");
        assert_eq!(lines[6], "▀▄ Menu Name: Exclusive Vegan ▄▀");
        assert_eq!(lines[7], "Price: 55    Name: Very special Tofu");
        assert_eq!(lines.len(), 12);
    }
}
