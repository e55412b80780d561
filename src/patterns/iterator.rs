//! Iterator: two menus store their items differently but are walked the same way.

use crate::domain::model::DemoKind;
use crate::domain::ports::Demo;
use crate::utils::error::Result;
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

pub trait Menu {
    fn name(&self) -> &str;
    fn items(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_>;
}

/// Backed by a growable list.
pub struct PancakeHouseMenu {
    items: Vec<MenuItem>,
}

impl PancakeHouseMenu {
    pub fn new() -> Self {
        Self {
            items: vec![MenuItem::new(15, "Pancake"), MenuItem::new(5, "Cupcake")],
        }
    }

    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    pub fn iter(&self) -> PancakeHouseMenuIterator<'_> {
        PancakeHouseMenuIterator {
            items: &self.items,
            inner: self.items.iter(),
        }
    }
}

impl Default for PancakeHouseMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PancakeHouseMenuIterator<'a> {
    items: &'a [MenuItem],
    inner: std::slice::Iter<'a, MenuItem>,
}

impl PancakeHouseMenuIterator<'_> {
    pub fn reset(&mut self) {
        self.inner = self.items.iter();
    }
}

impl<'a> Iterator for PancakeHouseMenuIterator<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl Menu for PancakeHouseMenu {
    fn name(&self) -> &str {
        "Pancake House"
    }

    fn items(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_> {
        Box::new(self.iter())
    }
}

pub const DINER_MENU_SIZE: usize = 2;

/// Backed by a fixed-size array.
pub struct DinerMenu {
    items: [MenuItem; DINER_MENU_SIZE],
}

impl DinerMenu {
    pub fn new() -> Self {
        Self {
            items: [MenuItem::new(25, "Steak"), MenuItem::new(12, "Meatballs")],
        }
    }

    pub fn iter(&self) -> DinerMenuIterator<'_> {
        DinerMenuIterator {
            items: &self.items,
            position: 0,
        }
    }
}

impl Default for DinerMenu {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DinerMenuIterator<'a> {
    items: &'a [MenuItem; DINER_MENU_SIZE],
    position: usize,
}

impl DinerMenuIterator<'_> {
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

impl<'a> Iterator for DinerMenuIterator<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }
}

impl Menu for DinerMenu {
    fn name(&self) -> &str {
        "Diner"
    }

    fn items(&self) -> Box<dyn Iterator<Item = &MenuItem> + '_> {
        Box::new(self.iter())
    }
}

pub struct Waitress<'a> {
    menus: Vec<&'a dyn Menu>,
}

impl<'a> Waitress<'a> {
    pub fn new(menus: Vec<&'a dyn Menu>) -> Self {
        Self { menus }
    }

    pub fn print_menus(&self, out: &mut dyn Write) -> Result<()> {
        for menu in &self.menus {
            tracing::debug!(menu = menu.name(), "printing menu");
            for item in menu.items() {
                writeln!(out, "{}", item)?;
            }
        }
        Ok(())
    }
}

pub struct Executor;

impl Demo for Executor {
    fn kind(&self) -> DemoKind {
        DemoKind::Iterator
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let pancake_house = PancakeHouseMenu::new();
        let diner = DinerMenu::new();
        let menus: Vec<&dyn Menu> = vec![&pancake_house, &diner];
        Waitress::new(menus).print_menus(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterators_reset() {
        let menu = DinerMenu::new();
        let mut iter = menu.iter();
        assert_eq!(iter.next().map(|item| item.price), Some(25));
        assert_eq!(iter.next().map(|item| item.price), Some(12));
        assert!(iter.next().is_none());
        iter.reset();
        assert_eq!(iter.next().map(|item| item.name.as_str()), Some("Steak"));

        let mut pancakes = PancakeHouseMenu::new();
        pancakes.add_item(MenuItem::new(7, "Waffle"));
        let mut iter = pancakes.iter();
        assert_eq!(iter.by_ref().count(), 3);
        iter.reset();
        assert_eq!(iter.next().map(|item| item.name.as_str()), Some("Pancake"));
    }

    #[test]
    fn test_menus_walk_uniformly() {
        let pancake_house = PancakeHouseMenu::new();
        let diner = DinerMenu::new();
        let menus: [&dyn Menu; 2] = [&pancake_house, &diner];
        let total: u32 = menus
            .iter()
            .flat_map(|menu| menu.items())
            .map(|item| item.price)
            .sum();
        assert_eq!(total, 15 + 5 + 25 + 12);
    }

    #[test]
    fn test_executor_output() {
        let mut out = Vec::new();
        Executor.run(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Price: 15    Name: Pancake\n\
             Price: 5    Name: Cupcake\n\
             Price: 25    Name: Steak\n\
             Price: 12    Name: Meatballs\n"
        );
    }
}
