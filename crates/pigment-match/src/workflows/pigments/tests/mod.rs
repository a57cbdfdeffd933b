mod common;
mod composer;
mod matcher;
