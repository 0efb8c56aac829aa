mod group;
mod historial;
mod member;
mod request;
