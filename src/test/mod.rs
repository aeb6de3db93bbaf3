mod sofascore;
