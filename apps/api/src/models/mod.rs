pub mod proposal;
pub mod site;
