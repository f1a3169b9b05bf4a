mod network;
mod path;
mod session;
