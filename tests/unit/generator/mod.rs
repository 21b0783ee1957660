mod pool;
mod shuffle;
