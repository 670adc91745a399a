mod halves;
