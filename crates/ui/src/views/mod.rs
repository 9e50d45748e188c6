mod experience;
mod interface;
mod menu;
mod portfolio;

pub use experience::Experience;
pub use interface::Interface;
pub use menu::Menu;
pub use portfolio::PortfolioView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
