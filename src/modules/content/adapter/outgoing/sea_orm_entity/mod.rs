pub mod site_content;
